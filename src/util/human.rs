const UNITS: [&str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// Format a raw byte count into a human-readable string: "12.5 MiB".
/// Counts below 1 KiB print the exact integer; anything larger gets one
/// decimal place. Handles the full u128 range (the daemon reports counts
/// that can exceed 2^64).
pub fn fmt_bytes(bytes: u128) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0usize;
    while value >= 1024.0 && unit < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    // Past YiB the mantissa just keeps growing
    format!("{:.1} {}", value, UNITS[unit - 1])
}

/// Thousands-separated decimal rendering of the exact integer: "1,431,655".
pub fn add_commas(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format bytes/s into a human-readable string: "12.5 MiB/s".
pub fn fmt_rate(bytes_per_sec: f64) -> String {
    fmt_bytes_f(bytes_per_sec) + "/s"
}

fn fmt_bytes_f(b: f64) -> String {
    const TIB: f64 = 1_099_511_627_776.0;
    const GIB: f64 = 1_073_741_824.0;
    const MIB: f64 = 1_048_576.0;
    const KIB: f64 = 1_024.0;
    if b >= TIB      { format!("{:.1} TiB", b / TIB) }
    else if b >= GIB { format!("{:.1} GiB", b / GIB) }
    else if b >= MIB { format!("{:.1} MiB", b / MIB) }
    else if b >= KIB { format!("{:.1} KiB", b / KIB) }
    else             { format!("{:.0} B",  b) }
}

/// Format a share in [0, 1] as a whole percentage: "84%".
pub fn fmt_pct(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Rank of the magnitude suffix in a fmt_bytes result ("B" = 0).
    fn magnitude_order(s: &str) -> usize {
        let suffix = s.rsplit(' ').next().unwrap();
        if suffix == "B" {
            0
        } else {
            1 + UNITS.iter().position(|u| *u == suffix).unwrap()
        }
    }

    #[test]
    fn small_counts_are_exact() {
        assert_eq!(fmt_bytes(0), "0 B");
        assert_eq!(fmt_bytes(1), "1 B");
        assert_eq!(fmt_bytes(800), "800 B");
        assert_eq!(fmt_bytes(1023), "1023 B");
    }

    #[test]
    fn binary_suffixes() {
        assert_eq!(fmt_bytes(1024), "1.0 KiB");
        assert_eq!(fmt_bytes(1536), "1.5 KiB");
        assert_eq!(fmt_bytes(1 << 20), "1.0 MiB");
        assert_eq!(fmt_bytes(5 * (1 << 30)), "5.0 GiB");
    }

    #[test]
    fn counts_past_u64_range() {
        // 2^70 = 1 ZiB, far beyond what fits in 64 bits
        assert_eq!(fmt_bytes(1u128 << 70), "1.0 ZiB");
        assert_eq!(fmt_bytes(1u128 << 80), "1.0 YiB");
        // Near the top of the range the suffix caps at YiB
        assert_eq!(magnitude_order(&fmt_bytes(u128::MAX)), UNITS.len());
    }

    #[test]
    fn commas_group_from_the_right() {
        assert_eq!(add_commas(0), "0");
        assert_eq!(add_commas(999), "999");
        assert_eq!(add_commas(1000), "1,000");
        assert_eq!(add_commas(1_431_655_765), "1,431,655,765");
        assert_eq!(
            add_commas(36_893_488_147_419_103_232), // 2^65
            "36,893,488,147,419,103,232"
        );
    }

    #[test]
    fn rate_formatting() {
        assert_eq!(fmt_rate(0.0), "0 B/s");
        assert_eq!(fmt_rate(1536.0), "1.5 KiB/s");
        assert_eq!(fmt_rate(2.5 * 1_048_576.0), "2.5 MiB/s");
    }

    #[test]
    fn pct_rounds_to_whole() {
        assert_eq!(fmt_pct(0.0), "0%");
        assert_eq!(fmt_pct(1.0), "100%");
        assert_eq!(fmt_pct(0.845), "84%");
    }

    proptest! {
        #[test]
        fn commas_round_trip(n in any::<u128>()) {
            let grouped = add_commas(n);
            let parsed: u128 = grouped.replace(',', "").parse().unwrap();
            prop_assert_eq!(parsed, n);
        }

        #[test]
        fn comma_groups_are_well_formed(n in any::<u128>()) {
            let grouped = add_commas(n);
            let mut chunks = grouped.split(',');
            let first = chunks.next().unwrap();
            prop_assert!(!first.is_empty() && first.len() <= 3);
            for chunk in chunks {
                prop_assert_eq!(chunk.len(), 3);
            }
        }

        #[test]
        fn magnitude_is_monotonic(a in any::<u128>(), b in any::<u128>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(magnitude_order(&fmt_bytes(lo)) <= magnitude_order(&fmt_bytes(hi)));
        }
    }
}
