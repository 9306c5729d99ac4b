/// Terminal logger setup for the binary
pub mod logging;
/// Decimal rounding helpers shared by the analyzers
pub mod numeric;
/// prettytable rendering of analysis reports
pub mod report_table;
