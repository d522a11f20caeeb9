/// Column order of the dengue dataset, as published upstream.
/// Field names are kept verbatim from the dataset's own header.
pub const CASE_COLUMNS: [&str; 9] = [
    "id",
    "data_iniSE",
    "casos",
    "ibge_code",
    "cidade",
    "uf",
    "cep",
    "latitude",
    "longitude",
];

pub const CASE_SEPARATOR: char = '|';
pub const RAIN_SEPARATOR: char = ',';

/// One row of the dengue case dataset. All fields are carried as the raw
/// text the file claims; normalization happens at aggregation time.
/// `yy_mm` starts empty and is populated by the derive-month stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    pub id: String,
    pub data_ini_se: String,
    pub casos: String,
    pub ibge_code: String,
    pub cidade: String,
    pub uf: String,
    pub cep: String,
    pub latitude: String,
    pub longitude: String,
    pub yy_mm: String,
}

impl CaseRecord {
    /// The 9 schema fields in dataset column order, without the derived
    /// `yy_mm`. Joining these with `|` reproduces the source line.
    pub fn fields(&self) -> [&str; 9] {
        [
            &self.id,
            &self.data_ini_se,
            &self.casos,
            &self.ibge_code,
            &self.cidade,
            &self.uf,
            &self.cep,
            &self.latitude,
            &self.longitude,
        ]
    }

    pub fn to_line(&self) -> String {
        self.fields().join(&CASE_SEPARATOR.to_string())
    }
}

/// One row of the rainfall dataset: (date, rain_mm, uf), positionally bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainRecord {
    pub date: String,
    pub rain_mm: String,
    pub uf: String,
}

/// A reconciled (state, month) bucket present in both datasets. Numeric
/// fields are already stringified; this is the final pre-format shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRecord {
    pub uf: String,
    pub year: String,
    pub month: String,
    pub rainfall: String,
    pub dengue_cases: String,
}
