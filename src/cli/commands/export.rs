use clap::Args;

use super::customer::FilterArgs;

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
    /// Directory to write the workbook into
    #[arg(short, long, default_value = ".")]
    pub output: String,
    /// Open the exported file with the platform spreadsheet application
    #[arg(long)]
    pub open: bool,
}
