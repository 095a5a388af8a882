use schedules::graph::*;
use schedules::parse::*;

// =============================================================================
// Compiled graph builders
// =============================================================================

pub fn table(schema: &str, name: &str) -> Table {
    Table {
        target: Target::new(schema, name),
    }
}

pub fn assertion(schema: &str, name: &str) -> Assertion {
    Assertion {
        target: Target::new(schema, name),
    }
}

pub fn operation(schema: &str, name: &str) -> Operation {
    Operation {
        target: Some(Target::new(schema, name)),
    }
}

pub fn untargeted_operation() -> Operation {
    Operation { target: None }
}

/// Graph with one table, one assertion, one targeted and one untargeted operation.
pub fn base_graph() -> CompiledGraph {
    CompiledGraph {
        tables: vec![table("warehouse", "users")],
        assertions: vec![assertion("warehouse_assertions", "users_not_null")],
        operations: vec![operation("warehouse", "refresh_views"), untargeted_operation()],
    }
}

pub fn fixture_graph() -> CompiledGraph {
    parse_graph(include_str!("../fixtures/compiled_graph.json")).expect("fixture graph should parse")
}

// =============================================================================
// Schedule builders
// =============================================================================

pub fn schedule(name: &str, cron: &str) -> Schedule {
    Schedule::new(name, cron)
}

pub fn schedule_with_actions(name: &str, cron: &str, actions: &[&str]) -> Schedule {
    Schedule {
        options: Some(ScheduleOptions {
            actions: actions.iter().map(|a| a.to_string()).collect(),
        }),
        ..Schedule::new(name, cron)
    }
}

pub fn schedule_with_emails(name: &str, cron: &str, emails: &[&str]) -> Schedule {
    Schedule {
        notification: Some(Notification {
            emails: emails.iter().map(|e| e.to_string()).collect(),
        }),
        ..Schedule::new(name, cron)
    }
}

pub fn file(schedules: Vec<Schedule>) -> SchedulesFile {
    SchedulesFile { schedules }
}
