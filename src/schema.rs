//! The retail schema: table names, column names and order types.
//!
//! Column names are metadata only. Statements are rendered positionally,
//! without a column list.

use std::fmt;

/// The seven tables, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Staff,
    Inventory,
    Orders,
    Collections,
    Deliveries,
    StaffOrders,
    OrderProducts,
}

impl Table {
    /// Generation and output order
    pub const ALL: [Table; 7] = [
        Table::Staff,
        Table::Inventory,
        Table::Orders,
        Table::Collections,
        Table::Deliveries,
        Table::StaffOrders,
        Table::OrderProducts,
    ];

    /// Table name as it appears in the INSERT statement
    pub fn sql_name(&self) -> &'static str {
        match self {
            Table::Staff => "STAFF",
            Table::Inventory => "INVENTORY",
            Table::Orders => "Orders",
            Table::Collections => "COLLECTIONS",
            Table::Deliveries => "DELIVERIES",
            Table::StaffOrders => "STAFF_ORDERS",
            Table::OrderProducts => "ORDER_PRODUCTS",
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::Staff => &["StaffID", "FName", "LName"],
            Table::Inventory => &[
                "ProductID",
                "ProductDesc",
                "ProductStockAmount",
                "ProductPrice",
            ],
            Table::Orders => &["OrderID", "OrderType", "OrderCompleted", "OrderPlaced"],
            Table::Collections => &["OrderID", "FName", "LName", "CollectionDate"],
            Table::Deliveries => &[
                "OrderID",
                "FName",
                "LName",
                "House",
                "Street",
                "City",
                "DeliveryDate",
            ],
            Table::StaffOrders => &["StaffID", "OrderID"],
            Table::OrderProducts => &["OrderID", "ProductID", "ProductQuantity"],
        }
    }

    /// Everything before the opening parenthesis of the value list.
    ///
    /// STAFF_ORDERS has no space before `(`.
    pub fn insert_prefix(&self) -> String {
        match self {
            Table::StaffOrders => format!("INSERT INTO {} VALUES", self.sql_name()),
            _ => format!("INSERT INTO {} VALUES ", self.sql_name()),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

/// How an order reaches the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    InStore,
    Collection,
    Delivery,
}

impl OrderType {
    pub const ALL: [OrderType; 3] = [OrderType::InStore, OrderType::Collection, OrderType::Delivery];

    /// Type for an order id: blocks of `block` consecutive ids share a type,
    /// cycling through [`OrderType::ALL`]
    pub fn for_order(order_id: usize, block: usize) -> Self {
        Self::ALL[(order_id / block) % Self::ALL.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::InStore => "InStore",
            OrderType::Collection => "Collection",
            OrderType::Delivery => "Delivery",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
