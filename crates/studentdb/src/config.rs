use std::time::Duration;

use studentdb_core::table::{
    students_table_config, ProvisionedThroughput, TableConfig, WaitPolicy, DEFAULT_TABLE_NAME,
};

/// DynamoDB Local listens here unless told otherwise.
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:8000";
pub const DEFAULT_REGION: &str = "us-west-2";

/// Store settings accepted on the command line or from the environment.
#[derive(Debug, Clone, clap::Args)]
pub struct StoreArgs {
    /// DynamoDB endpoint URL
    #[arg(long, env = "AWS_ENDPOINT_URL", default_value = DEFAULT_ENDPOINT_URL)]
    pub endpoint_url: String,

    /// AWS region label sent with every request
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Name of the students table
    #[arg(long, env = "STUDENTDB_TABLE_NAME", default_value = DEFAULT_TABLE_NAME)]
    pub table_name: String,

    /// Read capacity units provisioned when the table is created
    #[arg(long, env = "STUDENTDB_READ_CAPACITY", default_value = "5")]
    pub read_capacity: i64,

    /// Write capacity units provisioned when the table is created
    #[arg(long, env = "STUDENTDB_WRITE_CAPACITY", default_value = "5")]
    pub write_capacity: i64,

    /// How many times to poll a new table before giving up
    #[arg(long, env = "STUDENTDB_WAIT_ATTEMPTS", default_value = "25")]
    pub wait_attempts: u32,

    /// Milliseconds between two table status polls
    #[arg(long, env = "STUDENTDB_WAIT_DELAY_MS", default_value = "2000")]
    pub wait_delay_ms: u64,

    /// Run against an in-process store instead of DynamoDB
    #[arg(long, env = "STUDENTDB_IN_MEMORY")]
    pub in_memory: bool,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    pub region: String,
    pub table_name: String,
    pub throughput: ProvisionedThroughput,
    pub wait_policy: WaitPolicy,
    pub in_memory: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: Some(DEFAULT_ENDPOINT_URL.to_string()),
            region: DEFAULT_REGION.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            throughput: ProvisionedThroughput::default(),
            wait_policy: WaitPolicy::default(),
            in_memory: false,
        }
    }
}

impl From<StoreArgs> for Config {
    fn from(args: StoreArgs) -> Self {
        // An empty endpoint means "use the regional AWS endpoint".
        let endpoint_url = Some(args.endpoint_url.trim().to_string()).filter(|u| !u.is_empty());

        Self {
            endpoint_url,
            region: args.region,
            table_name: args.table_name,
            throughput: ProvisionedThroughput {
                read_capacity_units: args.read_capacity,
                write_capacity_units: args.write_capacity,
            },
            wait_policy: WaitPolicy::new(
                args.wait_attempts,
                Duration::from_millis(args.wait_delay_ms),
            ),
            in_memory: args.in_memory,
        }
    }
}

impl Config {
    /// Schema of the table this configuration points at.
    pub fn table_config(&self) -> TableConfig {
        students_table_config()
            .with_table_name(&self.table_name)
            .with_throughput(self.throughput)
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        if self.in_memory {
            return "In-memory store".to_string();
        }
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({}, region: {})", url, self.region),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}
