pub mod compute_insights;
