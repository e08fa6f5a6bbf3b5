mod export_roundtrip;
mod import_pipeline;
