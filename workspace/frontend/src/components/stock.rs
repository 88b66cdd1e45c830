mod chart;
mod query_form;
mod view;

pub use view::StockView;
