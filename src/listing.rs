use std::fmt;

use crate::coordinates::Coordinates;

/// Column names matching [`Listing::to_tsv_row`].
pub const TSV_HEADER: &str = "url\tname\tmonthly_rent\tmonthly_fees\textra_fee_months\tlat\tlng\tstations\tmadori\tsurface\tbukken_type\tage\n";

/// A scraped rental listing (bukken), normalized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub url: String,
    pub name: String,
    /// Yen.
    pub monthly_rent: u64,
    /// Management fees, yen per month.
    pub monthly_fees: u64,
    /// One-time fees expressed in months of rent.
    pub extra_fee_months: f64,
    pub coordinates: Coordinates,
    /// Newline separated.
    pub stations: String,
    pub madori: String,
    /// Square meters.
    pub surface: f64,
    pub bukken_type: String,
    pub age: String,
}

impl Listing {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// One line, tab separated. Stations are joined with " / " to keep the row on one line.
    pub fn to_tsv_row(&self) -> String {
        let cells = [
            self.url.clone(),
            self.name.clone(),
            self.monthly_rent.to_string(),
            self.monthly_fees.to_string(),
            format!("{:.2}", self.extra_fee_months),
            self.coordinates.lat.to_string(),
            self.coordinates.lng.to_string(),
            self.stations.replace('\n', " / "),
            self.madori.clone(),
            self.surface.to_string(),
            self.bukken_type.clone(),
            self.age.clone(),
        ];
        let mut row = cells.map(|c| c.replace('\t', " ")).join("\t");
        row.push('\n');
        row
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.url)?;
        writeln!(f, "  rent        : {} JPY", self.monthly_rent)?;
        writeln!(f, "  fees        : {} JPY / month", self.monthly_fees)?;
        writeln!(f, "  extra fees  : {:.2} months", self.extra_fee_months)?;
        writeln!(f, "  coordinates : {}", self.coordinates)?;
        writeln!(f, "  madori      : {}", self.madori)?;
        writeln!(f, "  surface     : {} m2", self.surface)?;
        writeln!(f, "  type        : {}", self.bukken_type)?;
        writeln!(f, "  age         : {}", self.age)?;
        write!(f, "  stations    :")?;
        for station in self.stations.lines() {
            write!(f, "\n    {station}")?;
        }
        Ok(())
    }
}
