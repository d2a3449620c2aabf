use crate::coordinates::Coordinates;
use crate::listing::Listing;
use crate::Result;

/// A site whose listing pages can be fetched and turned into a [`Listing`].
///
/// A source is built once from its two documents and only queried afterwards,
/// except for the rent `scrap_price` remembers for `scrap_other_fees`.
pub trait ListingSource: Sized {
    /// Where the supplementary document of `url` lives.
    fn supplementary_url(url: &str) -> String;

    /// Parses the listing page and its supplementary page.
    fn from_documents(url: &str, main_html: &str, supplementary_html: &str) -> Result<Self>;

    fn url(&self) -> &str;

    fn scrap_name(&self) -> Result<String>;

    /// Monthly rent and monthly fees, in yen. Must run before [`Self::scrap_other_fees`].
    fn scrap_price(&mut self) -> Result<(u64, u64)>;

    /// One-time fees in months of rent.
    fn scrap_other_fees(&self) -> Result<f64>;

    fn scrap_coordinates(&self) -> Result<Coordinates>;

    fn scrap_closest_stations(&self) -> Result<String>;

    fn scrap_madori(&self) -> Result<String>;

    fn scrap_surface(&self) -> Result<f64>;

    fn scrap_bukken_type(&self) -> Result<String>;

    fn scrap_age(&self) -> Result<String>;

    /// Fills `listing` field by field, stopping at the first failure.
    fn scrap_all(&mut self, listing: &mut Listing) -> Result<()> {
        listing.url = self.url().to_string();
        listing.name = self.scrap_name()?;
        let (monthly_rent, monthly_fees) = self.scrap_price()?;
        listing.monthly_rent = monthly_rent;
        listing.monthly_fees = monthly_fees;
        listing.extra_fee_months = self.scrap_other_fees()?;
        listing.coordinates = self.scrap_coordinates()?;
        listing.stations = self.scrap_closest_stations()?;
        listing.madori = self.scrap_madori()?;
        listing.surface = self.scrap_surface()?;
        listing.bukken_type = self.scrap_bukken_type()?;
        listing.age = self.scrap_age()?;
        Ok(())
    }
}
