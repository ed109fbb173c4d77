const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];

/// Human-readable size for listings: plain bytes below 1 KiB, otherwise one
/// decimal in the largest binary unit that keeps the value at or above 1.
pub fn format_size(size: u64) -> String {
    if size < 1024 {
        return format!("{size}B");
    }

    let (value, unit) = UNITS[1..]
        .iter()
        .fold((size as f64, UNITS[0]), |(value, unit), next| {
            if value >= 1024.0 {
                (value / 1024.0, *next)
            } else {
                (value, unit)
            }
        });
    format!("{value:.1}{unit}")
}
