use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain::{self, seed, shell_state::ShellState},
    infra::{self, clock::SystemClock},
    ui::{self, CrosstermEventSource},
    usecases::{
        self,
        action_center::{self, ActionItem},
        bootstrap,
        shell::DefaultShellOrchestrator,
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let (context, _log_guard) = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    let command = cli.command_or_default();
    match &command {
        Command::Run => {
            let state = ShellState::new(seed::mock_store(), context.settings.clone());
            let mut orchestrator = DefaultShellOrchestrator::new(state, SystemClock);
            let mut event_source = CrosstermEventSource;

            ui::shell::start(&context, &mut event_source, &mut orchestrator)?;
        }
        Command::Actions { priority, .. } => {
            let origin = command.origin();
            let items = action_center::items(&seed::mock_store(), origin, *priority);
            tracing::info!(
                origin = origin.as_label(),
                priority = priority.as_label(),
                count = items.len(),
                "listing action center"
            );

            for line in action_lines(&items) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Plain-text rendering of the action center queue, one row per item.
fn action_lines(items: &[ActionItem]) -> Vec<String> {
    if items.is_empty() {
        return vec!["No pending actions.".to_owned()];
    }

    items
        .iter()
        .map(|item| match item {
            ActionItem::Bulk(group) => {
                let names: Vec<&str> = group
                    .members
                    .iter()
                    .map(|member| member.contact_name.as_str())
                    .collect();
                format!(
                    "[bulk x{}] {}: {}",
                    group.members.len(),
                    group.title,
                    names.join(", ")
                )
            }
            ActionItem::Single {
                conversation_id,
                contact_name,
                suggestion,
            } => format!(
                "[{}] {} - {} ({conversation_id}, {}% confidence)",
                suggestion.priority.as_label(),
                suggestion.title,
                contact_name,
                suggestion.confidence
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suggestion::{PriorityFilter, SuggestionOrigin};

    #[test]
    fn action_lines_start_with_bulk_group() {
        let items = action_center::items(
            &seed::mock_store(),
            SuggestionOrigin::Active,
            PriorityFilter::All,
        );

        let lines = action_lines(&items);

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("[bulk x3] Send Product Catalog: "));
        assert!(lines[1].starts_with("[High] Schedule Call - Zoya Sayed (chat_1, "));
    }

    #[test]
    fn empty_queue_prints_notice() {
        assert_eq!(action_lines(&[]), ["No pending actions."]);
    }
}
