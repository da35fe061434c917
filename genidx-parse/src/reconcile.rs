use std::collections::HashSet;

use genidx_core::ReferenceAssembly;
use genidx_core::utils::sort_chromosomes;

///
/// Divergence between the chromosomes of a file and a reference assembly.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// In the file, not in the reference assembly
    pub excess: Vec<String>,
    /// In the reference assembly, never seen in the file
    pub missing: Vec<String>,
}

///
/// Compares observed chromosomes against a reference assembly.
///
#[derive(Debug, Clone, Copy)]
pub struct AssemblyReconciler<'a> {
    reference: &'a ReferenceAssembly,
}

impl<'a> AssemblyReconciler<'a> {
    pub fn new(reference: &'a ReferenceAssembly) -> Self {
        AssemblyReconciler { reference }
    }

    ///
    /// Whether intervals on `chr` may be kept when filtering strictly.
    ///
    pub fn admits(&self, chr: &str) -> bool {
        self.reference.contains(chr)
    }

    ///
    /// Find excess and missing chromosomes. Both lists come back in karyotype order.
    ///
    /// Excess chromosomes are matched against reference names exactly as stored.
    /// Missing chromosomes are matched case-insensitively, since reference names may
    /// be mixed case (`chrX`) while file tokens are not normalized for case.
    pub fn reconcile<'b, I>(&self, observed: I) -> Reconciliation
    where
        I: IntoIterator<Item = &'b str>,
    {
        let observed: HashSet<&str> = observed.into_iter().collect();
        let observed_lower: HashSet<String> = observed.iter().map(|c| c.to_lowercase()).collect();

        let mut excess: Vec<String> = observed
            .iter()
            .filter(|chr| !self.reference.contains(chr))
            .map(|chr| chr.to_string())
            .collect();

        let mut missing: Vec<String> = self
            .reference
            .chromosomes()
            .filter(|chr| !observed_lower.contains(&chr.to_lowercase()))
            .cloned()
            .collect();

        sort_chromosomes(&mut excess);
        sort_chromosomes(&mut missing);

        Reconciliation { excess, missing }
    }
}
