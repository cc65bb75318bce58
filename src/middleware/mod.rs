pub mod analyze_request;
