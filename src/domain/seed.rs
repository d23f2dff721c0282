//! Static mock inbox: five conversations, their suggestions, and the
//! proactive suggestions raised without a triggering message.

use super::{
    chat::{Contact, Conversation, LeadStage},
    inbox::InboxStore,
    message::{Message, MessageSender},
    suggestion::{
        ActionPayload, Priority, Reasoning, Suggestion, SuggestionOrigin, SuggestionStatus,
    },
};

pub const DEFAULT_AGENT_NAME: &str = "Riya Patel";

/// Builds the seeded store used by the TUI and the `actions` report.
pub fn mock_store() -> InboxStore {
    let mut conversations = mock_conversations();
    let seeded = active_suggestions()
        .into_iter()
        .chain(proactive_suggestions());

    for (conversation_id, suggestion) in seeded {
        match conversations
            .iter_mut()
            .find(|conversation| conversation.id == conversation_id)
        {
            Some(conversation) => conversation.suggestions.push(suggestion),
            None => tracing::debug!(
                conversation_id,
                suggestion_id = %suggestion.id,
                "seed suggestion has no owning conversation; skipped"
            ),
        }
    }

    InboxStore::new(conversations)
}

fn mock_conversations() -> Vec<Conversation> {
    vec![
        conversation(
            "chat_1",
            Contact {
                email: Some("zoya.s@example.com".to_owned()),
                ..contact(
                    "c1",
                    "Zoya Sayed",
                    "+91 98765 43210",
                    "https://i.pravatar.cc/150?u=zoya",
                    LeadStage::Hot,
                    &["Interested", "WhatsApp API"],
                    "Customer is asking about pricing for the enterprise plan.",
                    "Just now",
                    "Website",
                )
            },
            vec![
                Message::text(
                    "m1",
                    MessageSender::Contact,
                    "Hi, I was looking at the enterprise plan features.",
                    "10:30 AM",
                ),
                Message::text(
                    "m2",
                    MessageSender::Agent,
                    concat!(
                        "Hello Zoya! \u{1F44B} Thanks for reaching out. ",
                        "What specific features are you interested in?"
                    ),
                    "10:32 AM",
                ),
                Message::text(
                    "m3",
                    MessageSender::Contact,
                    "Mostly the broadcast limits and the chatbot integration.",
                    "10:35 AM",
                ),
                Message::text(
                    "m4",
                    MessageSender::Contact,
                    concat!(
                        "Can you send the pricing PDF? Also, I am busy now, ",
                        "can you give me a call tomorrow at 4pm to discuss?"
                    ),
                    "10:36 AM",
                ),
            ],
            1,
            true,
        ),
        conversation(
            "chat_2",
            contact(
                "c2",
                "Priya Singh",
                "+91 99887 77665",
                "https://i.pravatar.cc/150?u=rahul",
                LeadStage::New,
                &["New Lead"],
                "",
                "1h ago",
                "Facebook Ad",
            ),
            vec![Message::text(
                "m21",
                MessageSender::Contact,
                "Is this available?",
                "09:00 AM",
            )],
            0,
            false,
        ),
        conversation(
            "chat_3",
            contact(
                "c3",
                "Rahul Sharma",
                "+91 88776 66554",
                "https://i.pravatar.cc/150?u=priya",
                LeadStage::Warm,
                &["Follow-up"],
                "Needs demo",
                "Yesterday",
                "Referral",
            ),
            vec![Message::text(
                "m31",
                MessageSender::Contact,
                "Thanks for the demo.",
                "Yesterday",
            )],
            2,
            false,
        ),
        conversation(
            "chat_4",
            contact(
                "c4",
                "Amit Kumar",
                "+91 77665 55443",
                "https://i.pravatar.cc/150?u=amit",
                LeadStage::Cold,
                &["Inactive"],
                "No response for 2 weeks",
                "2 weeks ago",
                "Website",
            ),
            vec![Message::text(
                "m41",
                MessageSender::Agent,
                "Hi Amit, just checking in.",
                "2 weeks ago",
            )],
            0,
            false,
        ),
        conversation(
            "chat_5",
            contact(
                "c5",
                "Sneha Gupta",
                "+91 66554 44332",
                "https://i.pravatar.cc/150?u=sneha",
                LeadStage::Warm,
                &["Support"],
                "Issue with integration",
                "5m ago",
                "Support Ticket",
            ),
            vec![Message::text(
                "m51",
                MessageSender::Contact,
                "My Shopify integration is not syncing orders.",
                "5m ago",
            )],
            1,
            false,
        ),
    ]
}

fn active_suggestions() -> Vec<(&'static str, Suggestion)> {
    let catalog = || ActionPayload::SendTemplate {
        template_name: Some("Product_Catalog_2024.pdf".to_owned()),
    };

    vec![
        (
            "chat_1",
            suggestion(
                "sugg_1",
                "Schedule Call",
                "Call Zoya tomorrow at 4:00 PM",
                reasoning(
                    "\"call tomorrow at 4pm\"",
                    "Request Call",
                    &["Time: Tomorrow 16:00", "Action: Call"],
                ),
                98,
                Priority::High,
                ActionPayload::ScheduleFollowup {
                    date: "Tomorrow".to_owned(),
                    time: "16:00".to_owned(),
                },
            ),
        ),
        (
            "chat_1",
            suggestion(
                "sugg_2",
                "Send Pricing PDF",
                "Share Enterprise Pricing Brochure",
                reasoning(
                    "\"send pricing PDF\"",
                    "Request Document",
                    &["Document: Pricing PDF"],
                ),
                92,
                Priority::Medium,
                ActionPayload::SendTemplate {
                    template_name: Some("Enterprise_Pricing_v2.pdf".to_owned()),
                },
            ),
        ),
        (
            "chat_2",
            suggestion(
                "sugg_3",
                "Send Product Catalog",
                "Share latest catalog for new lead",
                reasoning(
                    "New Lead Source: Facebook Ad",
                    "Initial Engagement",
                    &["Source: FB Ad"],
                ),
                88,
                Priority::Medium,
                catalog(),
            ),
        ),
        (
            "chat_3",
            suggestion(
                "sugg_4",
                "Send Product Catalog",
                "Share latest catalog for new lead",
                reasoning("Post-Demo (24h)", "Nurture", &["Event: Demo"]),
                90,
                Priority::Medium,
                catalog(),
            ),
        ),
        (
            "chat_4",
            suggestion(
                "sugg_5",
                "Send Product Catalog",
                "Share latest catalog to re-engage",
                reasoning("Inactive for 14 days", "Re-engagement", &["Time: 14 days"]),
                85,
                Priority::Medium,
                catalog(),
            ),
        ),
        (
            "chat_5",
            suggestion(
                "sugg_6",
                "Escalate to Technical Support",
                "Integration issue requires technical assistance",
                reasoning(
                    "\"Shopify integration not syncing\"",
                    "Technical Issue",
                    &["Topic: Integration"],
                ),
                95,
                Priority::High,
                ActionPayload::Escalate {
                    department: "Technical Support".to_owned(),
                    reason: None,
                },
            ),
        ),
    ]
}

// The daily "top priorities" card targets the dashboard rather than a
// conversation and is therefore not part of the seed.
fn proactive_suggestions() -> Vec<(&'static str, Suggestion)> {
    let proactive = |suggestion: Suggestion| Suggestion {
        origin: SuggestionOrigin::Proactive,
        ..suggestion
    };

    vec![
        (
            "chat_4",
            proactive(suggestion(
                "pro_1",
                "Inactive Lead - Re-engage Now",
                "No contact in 14 days. Lead at risk of going cold.",
                reasoning("Last message > 14 days", "Re-engagement", &["Time: 14 days"]),
                85,
                Priority::High,
                ActionPayload::SendTemplate {
                    template_name: Some("Re_Engagement_Template.pdf".to_owned()),
                },
            )),
        ),
        (
            "chat_5",
            proactive(suggestion(
                "pro_2",
                "Frustration Detected - Escalate",
                "Technical issue + frustration keywords. Prevent churn.",
                reasoning(
                    "Frustration keywords detected",
                    "Churn Prevention",
                    &["Sentiment: Negative"],
                ),
                95,
                Priority::High,
                ActionPayload::Escalate {
                    department: "Technical Support".to_owned(),
                    reason: Some("Frustration detected".to_owned()),
                },
            )),
        ),
        (
            "chat_3",
            proactive(suggestion(
                "pro_4",
                "Perfect Timing - Post-Demo Upsell",
                "Demo completed 24h ago. Conversion window active.",
                reasoning("Demo + 24h", "Upsell", &["Event: Demo"]),
                78,
                Priority::Medium,
                ActionPayload::SendTemplate {
                    template_name: Some("Enterprise_Comparison.pdf".to_owned()),
                },
            )),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn contact(
    id: &str,
    name: &str,
    phone: &str,
    avatar: &str,
    lead_stage: LeadStage,
    tags: &[&str],
    notes: &str,
    last_active: &str,
    source: &str,
) -> Contact {
    Contact {
        id: id.to_owned(),
        name: name.to_owned(),
        phone: phone.to_owned(),
        email: None,
        avatar: Some(avatar.to_owned()),
        lead_stage,
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
        notes: notes.to_owned(),
        last_active: last_active.to_owned(),
        source: source.to_owned(),
    }
}

fn conversation(
    id: &str,
    contact: Contact,
    messages: Vec<Message>,
    unread_count: u32,
    is_pinned: bool,
) -> Conversation {
    Conversation {
        id: id.to_owned(),
        contact,
        messages,
        unread_count,
        is_pinned,
        suggestions: Vec::new(),
    }
}

fn reasoning(trigger: &str, intent: &str, entities: &[&str]) -> Reasoning {
    Reasoning {
        trigger: trigger.to_owned(),
        intent: intent.to_owned(),
        entities: entities.iter().map(|entity| (*entity).to_owned()).collect(),
    }
}

fn suggestion(
    id: &str,
    title: &str,
    description: &str,
    reasoning: Reasoning,
    confidence: u8,
    priority: Priority,
    payload: ActionPayload,
) -> Suggestion {
    Suggestion {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        reasoning,
        confidence,
        priority,
        status: SuggestionStatus::Pending,
        origin: SuggestionOrigin::Active,
        payload,
    }
}
