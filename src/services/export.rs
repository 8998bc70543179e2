//! Printable summary of an intervention request

use serde::Serialize;

use crate::models::InterventionRequest;

const MISSING: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSection {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

/// Read-only view of a request laid out for printing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSheet {
    pub number: String,
    pub status: String,
    pub sections: Vec<SheetSection>,
    pub description: String,
}

impl From<&InterventionRequest> for RequestSheet {
    fn from(request: &InterventionRequest) -> Self {
        let equipment = request.equipment.as_ref();
        let row = |label: &str, value: String| (label.to_string(), value);

        let equipment_section = SheetSection {
            title: "EQUIPMENT".to_string(),
            rows: vec![
                row("Name", equipment.map_or(MISSING.into(), |e| e.name.clone())),
                row("Code", equipment.map_or(MISSING.into(), |e| e.code.clone())),
                row(
                    "Location",
                    request.location.clone().unwrap_or_else(|| MISSING.into()),
                ),
                row("Priority", request.priority.to_string()),
            ],
        };

        let details_section = SheetSection {
            title: "REQUEST DETAILS".to_string(),
            rows: vec![
                row(
                    "Created",
                    request.created_at.format("%d/%m/%Y %H:%M").to_string(),
                ),
                row(
                    "Desired date",
                    request
                        .desired_date
                        .map_or(MISSING.into(), |d| d.format("%d/%m/%Y").to_string()),
                ),
                row("Type", request.request_type.to_string()),
                row(
                    "Requester",
                    request
                        .requester
                        .as_ref()
                        .map_or(MISSING.into(), |p| p.full_name()),
                ),
                row("Title", request.title.clone()),
            ],
        };

        Self {
            number: request.number.clone(),
            status: request.status.to_string(),
            sections: vec![equipment_section, details_section],
            description: request.description.clone(),
        }
    }
}

impl RequestSheet {
    pub fn file_name(&self) -> String {
        format!("Request_{}.txt", self.number)
    }

    /// Plain-text rendering, the description wrapped at `width` columns
    pub fn render_text(&self, width: usize) -> Vec<String> {
        let mut lines = vec![
            "INTERVENTION REQUEST".to_string(),
            format!("No. {}", self.number),
            format!("Status: {}", self.status),
        ];

        for section in &self.sections {
            lines.push(String::new());
            lines.push(section.title.clone());
            let label_width = section.rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
            for (label, value) in &section.rows {
                lines.push(format!("  {:<width$}  {}", label, value, width = label_width));
            }
        }

        lines.push(String::new());
        lines.push("Description:".to_string());
        lines.extend(wrap(&self.description, width.max(1)));
        lines
    }
}

/// Greedy word wrap; words longer than `width` get a line of their own
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}
