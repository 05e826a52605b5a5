use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Key under which a species stores its totals, next to the sex branches.
pub const TOTAL_KEY: &str = "total";

/// Gene name → TPM.
pub type GeneTpm = BTreeMap<String, f64>;

/// Tissue → replicate → genes.
pub type TissueBranch = BTreeMap<String, BTreeMap<i64, GeneDict>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeneDict {
    #[serde(rename = "geneDict")]
    pub genes: GeneTpm,
}

impl GeneDict {
    pub fn new(genes: GeneTpm) -> Self {
        Self { genes }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesRecord {
    pub sexes: BTreeMap<String, TissueBranch>,
    pub total: GeneDict,
}

impl SpeciesRecord {
    /// Stores a sample's genes, replacing whatever was stored for the same
    /// sex/tissue/replicate. Returns the replaced genes.
    pub fn insert(
        &mut self,
        sex: &str,
        tissue: &str,
        replicate: i64,
        genes: GeneTpm,
    ) -> Option<GeneTpm> {
        self.sexes
            .entry(sex.to_string())
            .or_default()
            .entry(tissue.to_string())
            .or_default()
            .insert(replicate, GeneDict::new(genes))
            .map(|previous| previous.genes)
    }

    pub fn leaf(&self, sex: &str, tissue: &str, replicate: i64) -> Option<&GeneTpm> {
        self.sexes
            .get(sex)?
            .get(tissue)?
            .get(&replicate)
            .map(|dict| &dict.genes)
    }

    pub fn leaves(&self) -> impl Iterator<Item = &GeneTpm> {
        self.sexes
            .values()
            .flat_map(|tissues| tissues.values())
            .flat_map(|replicates| replicates.values())
            .map(|dict| &dict.genes)
    }

    /// Recomputes `total` as the per-gene sum over every leaf.
    pub fn compute_total(&mut self) {
        let mut total = GeneTpm::new();
        for genes in self.leaves() {
            for (gene, tpm) in genes {
                *total.entry(gene.clone()).or_insert(0.0) += tpm;
            }
        }
        self.total = GeneDict::new(total);
    }
}

// Sex branches and the total share one JSON object, so keys are merged in
// sorted order.
impl Serialize for SpeciesRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sexes.len() + 1))?;
        let mut total_written = false;
        for (sex, tissues) in &self.sexes {
            if !total_written && sex.as_str() > TOTAL_KEY {
                map.serialize_entry(TOTAL_KEY, &self.total)?;
                total_written = true;
            }
            map.serialize_entry(sex, tissues)?;
        }
        if !total_written {
            map.serialize_entry(TOTAL_KEY, &self.total)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultTree {
    pub species: BTreeMap<String, SpeciesRecord>,
}

impl ResultTree {
    pub fn get(&self, species: &str) -> Option<&SpeciesRecord> {
        self.species.get(species)
    }
}
