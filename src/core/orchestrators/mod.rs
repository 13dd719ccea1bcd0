pub mod search_orchestrator;
