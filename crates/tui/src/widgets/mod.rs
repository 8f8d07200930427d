mod stateful_table;

pub use stateful_table::StatefulTable;
