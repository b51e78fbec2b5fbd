use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static MIN_PAYLOAD_LEN: OnceLock<usize> = OnceLock::new();

/// Minimum normalized length for a batch entry to count as a viable payload.
pub(crate) fn min_payload_len() -> usize {
    *MIN_PAYLOAD_LEN.get_or_init(|| parse_env_usize("GS1_MIN_PAYLOAD_LEN", 10))
}

static PARALLEL_THRESHOLD: OnceLock<usize> = OnceLock::new();

/// Batch size at which decoding switches from sequential to parallel.
pub(crate) fn parallel_threshold() -> usize {
    *PARALLEL_THRESHOLD.get_or_init(|| parse_env_usize("GS1_PARALLEL_THRESHOLD", 64).max(1))
}
