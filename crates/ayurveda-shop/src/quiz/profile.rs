use serde::Serialize;

use crate::dosha::Dosha;

/// Descriptive guidance shown alongside a quiz result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoshaProfile {
    pub dosha: Dosha,
    pub name: &'static str,
    pub elements: [&'static str; 2],
    pub attributes: &'static [&'static str],
    pub description: &'static str,
    pub balance_tips: &'static [&'static str],
}

impl DoshaProfile {
    pub fn for_dosha(dosha: Dosha) -> Self {
        match dosha {
            Dosha::Vata => Self {
                dosha,
                name: dosha.label(),
                elements: ["air", "space"],
                attributes: &["Creative", "Quick-thinking", "Adaptable", "Energetic", "Flexible"],
                description: "Vata is associated with air and space. In balance, Vata types are \
                    creative, energetic, and flexible; out of balance they may experience anxiety, \
                    dry skin, and digestive issues.",
                balance_tips: &[
                    "Follow a regular daily routine",
                    "Stay warm and avoid cold, dry environments",
                    "Use warming, grounding oils and herbs",
                    "Practice gentle, grounding exercises like yoga",
                    "Favor warm, cooked, moist foods with healthy fats",
                ],
            },
            Dosha::Pitta => Self {
                dosha,
                name: dosha.label(),
                elements: ["fire", "water"],
                attributes: &["Focused", "Intelligent", "Driven", "Disciplined", "Articulate"],
                description: "Pitta is associated with fire and water. In balance, Pitta types are \
                    focused, intelligent, and driven; out of balance they may experience \
                    inflammation, irritability, and skin sensitivity.",
                balance_tips: &[
                    "Avoid excessive heat and direct sunlight",
                    "Practice moderation in exercise and work",
                    "Include cooling foods and herbs in your diet",
                    "Make time for relaxation and fun",
                    "Use cooling, calming skincare products",
                ],
            },
            Dosha::Kapha => Self {
                dosha,
                name: dosha.label(),
                elements: ["earth", "water"],
                attributes: &["Calm", "Strong", "Loyal", "Patient", "Nurturing"],
                description: "Kapha is associated with earth and water. In balance, Kapha types are \
                    calm, strong, and nurturing; out of balance they may experience weight gain, \
                    lethargy, and congestion.",
                balance_tips: &[
                    "Stay active with regular, stimulating exercise",
                    "Embrace variety and new experiences",
                    "Use invigorating, detoxifying products",
                    "Favor light, warm, spicy foods",
                    "Rise early and maintain an active schedule",
                ],
            },
        }
    }
}
