use scraper::Html;

use crate::coordinates::{extract_coordinates, map_url, Coordinates};
use crate::fees::{fee_months, split_deposit_key_money, OneTimeFees};
use crate::locate::{field_text, first_text, PropertyField};
use crate::normalize::{parse_man_yen, parse_surface, parse_yen};
use crate::source::ListingSource;
use crate::stations::extract_stations;
use crate::Result;

const NAME: &str = ".section_h1-header-title";
/// Some pages show the rent in a note span instead of the main emphasis div.
const RENT: [&str; 2] = [
    "div.property_view_main-emphasis",
    "span.property_view_note-emphasis",
];

/// Scraper for a suumo.jp rental listing (`https://suumo.jp/chintai/...`).
pub struct SuumoScraper {
    url: String,
    document: Html,
    map_document: Html,
    /// Zero until `scrap_price` succeeds.
    monthly_rent: u64,
}

impl SuumoScraper {
    fn fee(&self, field: PropertyField) -> Result<u64> {
        parse_yen(&field_text(&self.document, field)?)
    }

    pub fn one_time_fees(&self) -> Result<OneTimeFees> {
        let (key_money, deposit) =
            split_deposit_key_money(&field_text(&self.document, PropertyField::DepositKeyMoney)?)?;
        Ok(OneTimeFees {
            key_money,
            deposit,
            insurance: self.fee(PropertyField::Insurance)?,
            other: self.fee(PropertyField::OtherFees)?,
        })
    }
}

impl ListingSource for SuumoScraper {
    fn supplementary_url(url: &str) -> String {
        map_url(url)
    }

    fn from_documents(url: &str, main_html: &str, supplementary_html: &str) -> Result<Self> {
        Ok(Self {
            url: url.to_string(),
            document: Html::parse_document(main_html),
            map_document: Html::parse_document(supplementary_html),
            monthly_rent: 0,
        })
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn scrap_name(&self) -> Result<String> {
        first_text(&self.document, &[NAME])
    }

    fn scrap_price(&mut self) -> Result<(u64, u64)> {
        let monthly_rent = parse_man_yen(&first_text(&self.document, &RENT)?)?;
        let monthly_fees = self.fee(PropertyField::MonthlyFees)?;
        self.monthly_rent = monthly_rent;
        Ok((monthly_rent, monthly_fees))
    }

    fn scrap_other_fees(&self) -> Result<f64> {
        let total = self.one_time_fees()?.total()?;
        fee_months(total, self.monthly_rent)
    }

    fn scrap_coordinates(&self) -> Result<Coordinates> {
        extract_coordinates(&self.map_document)
    }

    fn scrap_closest_stations(&self) -> Result<String> {
        extract_stations(&self.document)
    }

    fn scrap_madori(&self) -> Result<String> {
        field_text(&self.document, PropertyField::Madori)
    }

    fn scrap_surface(&self) -> Result<f64> {
        parse_surface(&field_text(&self.document, PropertyField::Surface)?)
    }

    fn scrap_bukken_type(&self) -> Result<String> {
        field_text(&self.document, PropertyField::BukkenType)
    }

    fn scrap_age(&self) -> Result<String> {
        field_text(&self.document, PropertyField::Age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const MAIN: &str = r#"<html><body>
        <h1 class="section_h1-header-title">
            コーポ中野
        </h1>
        <div class="property_view_main-emphasis">
            6万円</div>
        <div class="property_data-body">3000円</div>
        <div class="property_data-body">-/6万円</div>
        <div class="property_data-body">-</div>
        <div class="property_data-body">-</div>
        <div class="property_data-body">1DK</div>
        <div class="property_data-body">28.1m2</div>
        <div class="property_data-body">南</div>
        <div class="property_data-body">アパート</div>
        <div class="property_data-body">築12年</div>
        </body></html>"#;

    fn scraper() -> SuumoScraper {
        SuumoScraper::from_documents("https://suumo.jp/chintai/bc_2/", MAIN, "").unwrap()
    }

    #[test]
    fn supplementary_page_is_kankyo() {
        assert_eq!(
            SuumoScraper::supplementary_url("https://suumo.jp/chintai/bc_2"),
            "https://suumo.jp/chintai/bc_2/kankyo/"
        );
    }

    #[test]
    fn fees_need_rent_first() {
        let mut s = scraper();
        assert!(matches!(
            s.scrap_other_fees(),
            Err(Error::PreconditionViolated(_))
        ));
        assert_eq!(s.scrap_price().unwrap(), (60_000, 3_000));
        assert_eq!(s.scrap_other_fees().unwrap(), 1.0);
    }

    #[test]
    fn positional_fields() {
        let s = scraper();
        assert_eq!(s.scrap_name().unwrap(), "コーポ中野");
        assert_eq!(s.scrap_madori().unwrap(), "1DK");
        assert_eq!(s.scrap_surface().unwrap(), 28.1);
        assert_eq!(s.scrap_bukken_type().unwrap(), "アパート");
        assert_eq!(s.scrap_age().unwrap(), "築12年");
    }

    #[test]
    fn empty_map_page_has_no_coordinates() {
        assert!(matches!(
            scraper().scrap_coordinates(),
            Err(Error::FieldNotFound { .. })
        ));
    }
}
