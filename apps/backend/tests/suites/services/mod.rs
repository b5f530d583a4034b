pub mod with_txn;
