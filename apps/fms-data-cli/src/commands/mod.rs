pub mod import_match_results;
