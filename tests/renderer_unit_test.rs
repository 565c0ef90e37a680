//! Statement rendering tests.

use retail_datagen::{
    render_statement, render_to_string, GeneratedData, Generator, GeneratorConfig, SqlValue,
    Table, TableData,
};

fn s(v: &str) -> SqlValue {
    SqlValue::String(v.to_string())
}

#[test]
fn test_statement_formats() {
    let cases = [
        (
            Table::Staff,
            vec![SqlValue::Int(0), s("Abcdefghij"), s("Klmnopqrst")],
            "INSERT INTO STAFF VALUES (0, 'Abcdefghij', 'Klmnopqrst');",
        ),
        (
            Table::Inventory,
            vec![SqlValue::Int(7), s("Widget"), SqlValue::Int(120), SqlValue::Int(350)],
            "INSERT INTO INVENTORY VALUES (7, 'Widget', 120, 350);",
        ),
        (
            Table::Orders,
            vec![SqlValue::Int(3), s("InStore"), SqlValue::Bool(true), s("09-Mar-2011")],
            "INSERT INTO Orders VALUES (3, 'InStore', 1, '09-Mar-2011');",
        ),
        (
            Table::Collections,
            vec![SqlValue::Int(100), s("Ann"), s("Lee"), s("28-Feb-2001")],
            "INSERT INTO COLLECTIONS VALUES (100, 'Ann', 'Lee', '28-Feb-2001');",
        ),
        (
            Table::Deliveries,
            vec![
                SqlValue::Int(200),
                s("Ann"),
                s("Lee"),
                s("Abcde House"),
                s("Fghij St"),
                s("Klmno City"),
                s("01-Jan-2020"),
            ],
            "INSERT INTO DELIVERIES VALUES (200, 'Ann', 'Lee', 'Abcde House', 'Fghij St', 'Klmno City', '01-Jan-2020');",
        ),
        (
            Table::StaffOrders,
            vec![SqlValue::Int(4), SqlValue::Int(17)],
            "INSERT INTO STAFF_ORDERS VALUES(4, 17);",
        ),
        (
            Table::OrderProducts,
            vec![SqlValue::Int(17), SqlValue::Int(42), SqlValue::Int(3)],
            "INSERT INTO ORDER_PRODUCTS VALUES (17, 42, 3);",
        ),
    ];

    for (table, row, expected) in cases {
        assert_eq!(render_statement(table, &row), expected);
    }
}

#[test]
fn test_uncompleted_order_renders_zero() {
    let row = vec![
        SqlValue::Int(150),
        s("Collection"),
        SqlValue::Bool(false),
        s("15-Jun-2015"),
    ];
    assert_eq!(
        render_statement(Table::Orders, &row),
        "INSERT INTO Orders VALUES (150, 'Collection', 0, '15-Jun-2015');"
    );
}

#[test]
fn test_render_groups_tables_in_order() {
    let data = Generator::new(42, GeneratorConfig::default())
        .generate()
        .unwrap();
    let sql = render_to_string(&data);

    assert!(sql.ends_with(";\n"));
    assert_eq!(sql.lines().count(), data.total_rows());

    let prefixes: Vec<String> = Table::ALL.iter().map(|t| t.insert_prefix()).collect();
    let mut current = 0;
    for line in sql.lines() {
        while !line.starts_with(&prefixes[current]) {
            current += 1;
            assert!(current < prefixes.len(), "out of order line: {}", line);
        }
    }
    assert_eq!(current, prefixes.len() - 1);
}

#[test]
fn test_render_matches_per_row_statements() {
    let data = Generator::new(3, GeneratorConfig::default())
        .generate()
        .unwrap();
    let sql = render_to_string(&data);

    let expected: Vec<String> = data
        .tables
        .iter()
        .flat_map(|t| t.rows.iter().map(move |row| render_statement(t.table, row)))
        .collect();
    let lines: Vec<&str> = sql.lines().collect();
    assert_eq!(lines, expected);
}

#[test]
fn test_empty_data_renders_nothing() {
    let data = GeneratedData {
        tables: vec![TableData {
            table: Table::Staff,
            rows: Vec::new(),
        }],
    };
    assert_eq!(render_to_string(&data), "");
}
