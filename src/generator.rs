//! Data generator that produces row data for all tables.
//!
//! One routine per table, run in [`Table::ALL`] order. Each routine fills its
//! own [`TableData`]; nothing is shared between them except the
//! configuration and the RNG held by [`Generator`].

use crate::config::GeneratorConfig;
use crate::fake::FakeData;
use crate::schema::{OrderType, Table};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// SQL value representation
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Int(i64),
    String(String),
    Bool(bool),
}

impl SqlValue {
    /// Format as a literal inside a VALUES list
    pub fn to_sql(&self) -> String {
        match self {
            SqlValue::Int(n) => n.to_string(),
            SqlValue::String(s) => format!("'{}'", escape_string(s)),
            SqlValue::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SqlValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SqlValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

fn escape_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// A row of generated data
pub type Row = Vec<SqlValue>;

/// Generated data for a single table
#[derive(Debug, Clone)]
pub struct TableData {
    pub table: Table,
    pub rows: Vec<Row>,
}

impl TableData {
    fn new(table: Table) -> Self {
        Self {
            table,
            rows: Vec::new(),
        }
    }

    /// Integer values of one column, in row order
    pub fn int_column(&self, index: usize) -> Vec<i64> {
        self.rows
            .iter()
            .filter_map(|r| r.get(index).and_then(SqlValue::as_int))
            .collect()
    }
}

/// All generated data, in output order
#[derive(Debug, Clone)]
pub struct GeneratedData {
    pub tables: Vec<TableData>,
}

impl GeneratedData {
    pub fn table(&self, table: Table) -> Option<&TableData> {
        self.tables.iter().find(|t| t.table == table)
    }

    /// Total number of rows, which is also the number of statements
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }
}

/// Main data generator
pub struct Generator {
    config: GeneratorConfig,
    seed: u64,
    fake: FakeData<ChaCha8Rng>,
}

impl Generator {
    pub fn new(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            config,
            seed,
            fake: FakeData::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate every table
    pub fn generate(&mut self) -> anyhow::Result<GeneratedData> {
        self.generate_with_progress(|_| {})
    }

    /// Generate every table, calling `on_table` as each one completes
    pub fn generate_with_progress<F>(&mut self, mut on_table: F) -> anyhow::Result<GeneratedData>
    where
        F: FnMut(&TableData),
    {
        self.config.validate()?;

        let mut tables = Vec::with_capacity(Table::ALL.len());
        for table in Table::ALL {
            let data = self.generate_table(table)?;
            on_table(&data);
            tables.push(data);
        }

        Ok(GeneratedData { tables })
    }

    /// Generate a single table.
    ///
    /// Only the configuration this table depends on is checked; use
    /// [`Generator::generate`] to reject a bad configuration before any table
    /// is produced.
    pub fn generate_table(&mut self, table: Table) -> anyhow::Result<TableData> {
        self.config.validate_table(table)?;
        let data = match table {
            Table::Staff => self.generate_staff(),
            Table::Inventory => self.generate_inventory(),
            Table::Orders => self.generate_orders(),
            Table::Collections => self.generate_collections(),
            Table::Deliveries => self.generate_deliveries(),
            Table::StaffOrders => self.generate_staff_orders(),
            Table::OrderProducts => self.generate_order_products()?,
        };
        Ok(data)
    }

    fn person_name(&mut self) -> SqlValue {
        SqlValue::String(self.fake.name(self.config.person_name_len))
    }

    fn date(&mut self) -> SqlValue {
        let date = self.fake.date(self.config.min_year, self.config.max_year);
        SqlValue::String(date.to_string())
    }

    fn generate_staff(&mut self) -> TableData {
        let mut data = TableData::new(Table::Staff);
        for id in 0..self.config.staff_total {
            let first = self.person_name();
            let last = self.person_name();
            data.rows.push(vec![SqlValue::Int(id as i64), first, last]);
        }
        data
    }

    fn generate_inventory(&mut self) -> TableData {
        let (stock_min, stock_max) = self.config.stock_range;
        let (price_min, price_max) = self.config.price_range;

        let mut data = TableData::new(Table::Inventory);
        for id in 0..self.config.inv_total {
            let name = self.fake.name(self.config.product_name_len);
            let stock = self.fake.int_range(stock_min, stock_max);
            let price = self.fake.int_range(price_min, price_max);
            data.rows.push(vec![
                SqlValue::Int(id as i64),
                SqlValue::String(name),
                SqlValue::Int(stock),
                SqlValue::Int(price),
            ]);
        }
        data
    }

    fn generate_orders(&mut self) -> TableData {
        let mut data = TableData::new(Table::Orders);
        for id in 0..self.config.order_total {
            let order_type = OrderType::for_order(id, self.config.type_block);
            let completed = match order_type {
                OrderType::InStore => true,
                _ => self.fake.coin(),
            };
            let placed = self.date();
            data.rows.push(vec![
                SqlValue::Int(id as i64),
                SqlValue::String(order_type.as_str().to_string()),
                SqlValue::Bool(completed),
                placed,
            ]);
        }
        data
    }

    fn generate_collections(&mut self) -> TableData {
        let mut data = TableData::new(Table::Collections);
        for id in self.config.collection_ids.iter() {
            let first = self.person_name();
            let last = self.person_name();
            let date = self.date();
            data.rows.push(vec![SqlValue::Int(id), first, last, date]);
        }
        data
    }

    fn generate_deliveries(&mut self) -> TableData {
        let len = self.config.address_token_len;

        let mut data = TableData::new(Table::Deliveries);
        for id in self.config.delivery_ids.iter() {
            let first = self.person_name();
            let last = self.person_name();
            let house = self.fake.suffixed_name(len, " House");
            let street = self.fake.suffixed_name(len, " St");
            let city = self.fake.suffixed_name(len, " City");
            let date = self.date();
            data.rows.push(vec![
                SqlValue::Int(id),
                first,
                last,
                SqlValue::String(house),
                SqlValue::String(street),
                SqlValue::String(city),
                date,
            ]);
        }
        data
    }

    fn generate_staff_orders(&mut self) -> TableData {
        let mut data = TableData::new(Table::StaffOrders);
        for order_id in 0..self.config.order_total {
            let staff_id = self.fake.index(self.config.staff_total);
            data.rows.push(vec![
                SqlValue::Int(staff_id as i64),
                SqlValue::Int(order_id as i64),
            ]);
        }
        data
    }

    /// Line items for every order.
    ///
    /// Per order a product count `c` is drawn and `c` distinct products are
    /// sampled. Products are then popped off the sample one at a time, each
    /// taking a random share of what is left of `c`, until nothing is left.
    /// Sampled products still unpopped at that point are dropped, so an order
    /// may use fewer than `c` products, but its quantities always sum to `c`.
    fn generate_order_products(&mut self) -> anyhow::Result<TableData> {
        let max_products = self.config.max_products_per_order as i64;

        let mut data = TableData::new(Table::OrderProducts);
        for order_id in 0..self.config.order_total {
            let count = self.fake.int_range(1, max_products);
            let mut sampled = self
                .fake
                .sample_distinct(self.config.inv_total, count as usize)?;

            let mut remaining = count;
            while remaining > 0 {
                // each pop consumes at least one unit, so the sample outlasts `remaining`
                let Some(product_id) = sampled.pop() else {
                    break;
                };
                let quantity = self.fake.int_range(1, remaining);
                data.rows.push(vec![
                    SqlValue::Int(order_id as i64),
                    SqlValue::Int(product_id as i64),
                    SqlValue::Int(quantity),
                ]);
                remaining -= quantity;
            }
        }
        Ok(data)
    }
}
