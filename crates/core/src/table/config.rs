/// Name of the students table unless configured otherwise.
pub const DEFAULT_TABLE_NAME: &str = "Students";

/// Attribute holding the student ID, the table's partition key.
pub const PARTITION_KEY: &str = "student_id";

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub throughput: ProvisionedThroughput,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB scalar attribute types usable as keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Number,
    String,
}

impl AttributeType {
    /// DynamoDB type descriptor (`N`, `S`).
    pub fn descriptor(&self) -> &'static str {
        match self {
            AttributeType::Number => "N",
            AttributeType::String => "S",
        }
    }
}

/// Read and write capacity units fixed at table creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionedThroughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

impl Default for ProvisionedThroughput {
    fn default() -> Self {
        Self {
            read_capacity_units: 5,
            write_capacity_units: 5,
        }
    }
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Sets the provisioned capacity.
    pub fn with_throughput(mut self, throughput: ProvisionedThroughput) -> Self {
        self.throughput = throughput;
        self
    }

    /// Human readable summary of the schema, one line per property.
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("Table: {}", self.table_name),
            format!(
                "Partition key: {} ({})",
                self.partition_key.name,
                self.partition_key.attribute_type.descriptor()
            ),
            format!(
                "Capacity: {} RCU / {} WCU",
                self.throughput.read_capacity_units, self.throughput.write_capacity_units
            ),
        ]
    }
}

/// Returns the canonical table configuration for the students table.
/// This is a pure function - no I/O.
pub fn students_table_config() -> TableConfig {
    TableConfig {
        table_name: DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute {
            name: PARTITION_KEY.to_string(),
            attribute_type: AttributeType::Number,
        },
        throughput: ProvisionedThroughput::default(),
    }
}
