use macviz_common::mac::MacAddress;

/// Append-only record of the addresses analyzed during one run.
///
/// Threaded explicitly through the interactive loop; diagram filenames
/// derive from the 1-based position an address holds here.
#[derive(Debug, Default)]
pub struct Session {
    history: Vec<MacAddress>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an analyzed address and returns its 1-based position.
    pub fn record(&mut self, mac: MacAddress) -> usize {
        self.history.push(mac);
        self.history.len()
    }

    /// The position the next recorded address will get. Lets callers name
    /// an output file before committing the address to the history.
    pub fn next_position(&self) -> usize {
        self.history.len() + 1
    }

    pub fn contains(&self, mac: &MacAddress) -> bool {
        self.history.contains(mac)
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// History entries with their 1-based positions, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &MacAddress)> {
        self.history.iter().enumerate().map(|(i, mac)| (i + 1, mac))
    }
}
