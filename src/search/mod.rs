pub mod astar;
pub mod dijkstra;
pub mod frontier;
pub mod heuristic;
pub mod search_data;
