use waypath_core::format::OutputFormat;
use waypath_core::graph::NeighborView;
use waypath_core::heap::HeapOrder;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse neighbor view from string
pub fn parse_view(s: &str) -> std::result::Result<NeighborView, String> {
    s.parse::<NeighborView>().map_err(|e| e.to_string())
}

/// Parse heap order from string
pub fn parse_order(s: &str) -> std::result::Result<HeapOrder, String> {
    s.parse::<HeapOrder>().map_err(|e| e.to_string())
}
