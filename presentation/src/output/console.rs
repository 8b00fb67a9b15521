//! Console output formatter.

use colored::Colorize;
use foreman_domain::{AgentProfile, DeliveryState, PhaseStatus, StackScope};
use serde_json::json;

/// Formats command results for console display.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a delivery state as human-readable text.
    pub fn format_state(state: &DeliveryState) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} ({} mode)\n",
            "Delivery:".cyan().bold(),
            state.slug.bold(),
            state.mode
        ));
        if let Some(plan) = &state.plan_path {
            output.push_str(&format!("{} {}\n", "Plan:".cyan().bold(), plan));
        }

        output.push('\n');
        for phase in state.phase_order() {
            let record = state.phase_history.iter().find(|r| r.phase == *phase);
            let line = match record.map(|r| r.status) {
                Some(PhaseStatus::Completed) => {
                    format!("  {} {}", "[x]".green(), phase.display_name())
                }
                Some(PhaseStatus::Skipped) => {
                    let reason = record
                        .and_then(|r| r.reason.as_deref())
                        .unwrap_or("no reason recorded");
                    format!(
                        "  {} {} ({})",
                        "[~]".yellow(),
                        phase.display_name(),
                        reason.dimmed()
                    )
                }
                Some(PhaseStatus::Active) => {
                    format!("  {} {}", "[>]".cyan().bold(), phase.display_name().bold())
                }
                None => format!("  {} {}", "[ ]".dimmed(), phase.display_name().dimmed()),
            };
            output.push_str(&line);
            output.push('\n');
        }

        output.push('\n');
        if state.is_complete() {
            output.push_str(&format!("{}\n", "Delivery completed.".green().bold()));
        } else {
            output.push_str(&format!(
                "Current phase: {}\n",
                state.current_phase.to_string().bold()
            ));
        }
        output.push_str(
            &format!(
                "Started {} / updated {}\n",
                state.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
                state.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
            )
            .dimmed()
            .to_string(),
        );
        output
    }

    /// Format a delivery state as a JSON document.
    pub fn format_state_json(state: &DeliveryState) -> String {
        serde_json::to_string_pretty(state)
            .unwrap_or_else(|e| json!({ "error": e.to_string() }).to_string())
    }

    pub fn format_no_delivery() -> String {
        format!(
            "{}\nStart one with: copilot-foreman start <slug>\n",
            "No active delivery for this session.".yellow()
        )
    }

    pub fn format_no_delivery_json() -> String {
        json!({ "delivery": null }).to_string()
    }

    /// Format a routing decision.
    pub fn format_route(agent: &str, warning: Option<&str>) -> String {
        let mut output = format!("{} {}\n", "Agent:".cyan().bold(), agent.bold());
        if let Some(warning) = warning {
            output.push_str(&format!("{} {}\n", "Warning:".yellow().bold(), warning));
        }
        output
    }

    pub fn format_route_json(agent: &str, warning: Option<&str>) -> String {
        let mut doc = json!({ "agent": agent });
        if let Some(warning) = warning {
            doc["warning"] = json!(warning);
        }
        serde_json::to_string_pretty(&doc).unwrap_or_else(|_| doc.to_string())
    }

    /// Format the agent roster.
    pub fn format_agents(agents: &[&AgentProfile]) -> String {
        if agents.is_empty() {
            return format!("{}\n", "No agents match the filter.".yellow());
        }

        let mut output = String::new();
        for agent in agents {
            let access = if agent.can_write { "read-write" } else { "read-only" };
            let mut tags = vec![
                agent.layer.to_string(),
                agent.tier.to_string(),
                access.to_string(),
            ];
            if agent.optional {
                tags.push("optional".to_string());
            }
            output.push_str(&format!(
                "{} ({})\n",
                agent.name.to_string().bold(),
                tags.join(", ").dimmed()
            ));
            output.push_str(&format!(
                "    phases: {}\n",
                join_labels(agent.phases.iter().map(|p| p.as_str()))
            ));
            output.push_str(&format!(
                "    tasks:  {}\n",
                join_labels(agent.task_types.iter().map(|t| t.as_str()))
            ));
            if let StackScope::Only(stacks) = &agent.stacks {
                output.push_str(&format!(
                    "    stacks: {}\n",
                    join_labels(stacks.iter().map(|s| s.as_str()))
                ));
            }
        }
        output
    }

    pub fn format_agents_json(agents: &[&AgentProfile]) -> String {
        let entries: Vec<_> = agents
            .iter()
            .map(|agent| {
                json!({
                    "name": agent.name.as_str(),
                    "tier": agent.tier.as_str(),
                    "layer": agent.layer.as_str(),
                    "can_write": agent.can_write,
                    "phases": agent.phases.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
                    "task_types": agent.task_types.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
                    "stacks": match &agent.stacks {
                        StackScope::Universal => json!("any"),
                        StackScope::Only(stacks) => {
                            json!(stacks.iter().map(|s| s.as_str()).collect::<Vec<_>>())
                        }
                    },
                    "modes": agent.modes.iter().map(|m| m.as_str()).collect::<Vec<_>>(),
                    "optional": agent.optional,
                })
            })
            .collect();
        let doc = json!({ "agents": entries });
        serde_json::to_string_pretty(&doc).unwrap_or_else(|_| doc.to_string())
    }
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let joined = labels.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}
