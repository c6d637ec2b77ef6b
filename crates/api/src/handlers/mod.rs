pub mod bills;
