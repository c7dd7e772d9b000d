pub mod bubble_sorter;
pub mod heap_sorter;
pub mod merge_sorter;
pub mod no_sorter;
pub mod quick_sorter;
