/// Settings for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Written as the calendar's PRODID
    pub product_id: String,
    /// Written as the calendar's VERSION
    pub version: String,
    /// Field separator of the input listing
    pub delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            product_id: "-//aaronferrucci//csv2ics//".to_string(),
            version: "2.0".to_string(),
            delimiter: b'\t',
        }
    }
}
