//! Integration tests for the picfit configuration core

mod config_loading;
