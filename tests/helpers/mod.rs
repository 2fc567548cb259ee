pub mod mock_catalog;
