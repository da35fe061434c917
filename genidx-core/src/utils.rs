use std::cmp::Ordering;

/// Returns a sort key that orders chromosome names karyotypically:
/// numeric (1, 2, …, 22) → X → Y → M/MT → everything else alphabetically.
pub fn chrom_karyotype_key(chr: &str) -> (u8, u32, String) {
    let bare = strip_chr_prefix(chr);
    match bare {
        "X" | "x" => (1, 0, String::new()),
        "Y" | "y" => (2, 0, String::new()),
        "M" | "MT" | "m" | "mt" => (3, 0, String::new()),
        _ => match bare.parse::<u32>() {
            Ok(n) => (0, n, String::new()),
            Err(_) => (4, 0, bare.to_string()),
        },
    }
}

/// Compare two chromosome names in karyotype order, falling back to plain string order.
pub fn karyotype_cmp(a: &str, b: &str) -> Ordering {
    chrom_karyotype_key(a)
        .cmp(&chrom_karyotype_key(b))
        .then_with(|| a.cmp(b))
}

/// Sort chromosome names in place in karyotype order.
pub fn sort_chromosomes(chromosomes: &mut [String]) {
    chromosomes.sort_by(|a, b| karyotype_cmp(a, b));
}

///
/// Strip a leading `chr` prefix, matched case-insensitively.
///
pub fn strip_chr_prefix(chr: &str) -> &str {
    match chr.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("chr") => &chr[3..],
        _ => chr,
    }
}
