pub mod directory;
pub mod progress;
pub mod report;
#[cfg(test)]
pub mod test_collector;
