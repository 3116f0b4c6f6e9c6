use clap::{Args, Subcommand};

#[derive(Args)]
pub struct CustomerCommands {
    #[command(subcommand)]
    pub command: CustomerSubcommands,
}

/// Filters shared by `customer list` and `export`. All optional and
/// AND-combined; repeatable flags are OR within themselves.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Category (B2C, B2B or BULK)
    #[arg(long)]
    pub category: Option<String>,
    /// Sub-type, repeatable (any of the given values matches)
    #[arg(long = "sub-type")]
    pub sub_types: Vec<String>,
    /// District, exact match
    #[arg(long)]
    pub district: Option<String>,
    /// Order source, exact match
    #[arg(long = "order-source")]
    pub order_source: Option<String>,
    /// Status, exact match
    #[arg(long)]
    pub status: Option<String>,
    /// Earliest last-enquired date (YYYY-MM-DD, inclusive)
    #[arg(long = "date-from")]
    pub date_from: Option<String>,
    /// Latest last-enquired date (YYYY-MM-DD, inclusive)
    #[arg(long = "date-to")]
    pub date_to: Option<String>,
    /// Minimum order count (inclusive)
    #[arg(long = "min-orders")]
    pub min_orders: Option<u32>,
    /// Maximum order count (inclusive)
    #[arg(long = "max-orders")]
    pub max_orders: Option<u32>,
    /// Case-insensitive search over name, email, phone, district and order source
    #[arg(long)]
    pub search: Option<String>,
}

/// Record fields as flags, shared by `customer add` and `customer update`.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Customer name
    #[arg(long)]
    pub name: Option<String>,
    /// Category (B2C, B2B or BULK)
    #[arg(long)]
    pub category: Option<String>,
    /// Sub-type, must be valid for the category
    #[arg(long = "sub-type")]
    pub sub_type: Option<String>,
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Email address
    #[arg(long)]
    pub email: Option<String>,
    /// District
    #[arg(long)]
    pub district: Option<String>,
    /// Street address
    #[arg(long)]
    pub address: Option<String>,
    /// Postal code
    #[arg(long)]
    pub pincode: Option<String>,
    /// Order source
    #[arg(long = "order-source")]
    pub order_source: Option<String>,
    /// Last enquiry date (YYYY-MM-DD)
    #[arg(long = "last-enquired")]
    pub last_enquired: Option<String>,
    /// Number of orders placed
    #[arg(long = "order-count")]
    pub order_count: Option<u32>,
    /// Status (Active, Inactive, Hot or Cold)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Subcommand)]
pub enum CustomerSubcommands {
    /// List customers, optionally filtered
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show one customer in full
    Show {
        /// Customer id, or a unique prefix of one
        id: String,
    },
    /// Add a customer (missing required fields are prompted)
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Update the given fields of a customer
    Update {
        /// Customer id, or a unique prefix of one
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Remove a customer
    Remove {
        /// Customer id, or a unique prefix of one
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Import customers from a JSON array file
    Import {
        /// Path to the JSON file
        file: String,
    },
}
