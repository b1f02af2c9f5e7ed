pub mod module_graph;
pub mod module_record;
