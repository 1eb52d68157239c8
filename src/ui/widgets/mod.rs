// src/ui/widgets/mod.rs

pub mod drop_zone;          // Path input, selected file and loader.
pub mod footer;             // Key hints and current state.
pub mod notification_popup; // Blocking alerts.
pub mod results;            // The five analysis fields.
pub mod waveform_chart;     // The waveform line chart.
