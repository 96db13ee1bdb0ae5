//! Todo list driven by ducks.
//!
//! Demonstrates:
//! - Grouping ducks in a nested tree with `duck_tree!`
//! - Composing the tree into a single reducer
//! - Binding the same tree to a store so actions dispatch themselves
//!
//! Run with `RUST_LOG=ducktree=trace` to see composition and dispatch logs.

use ducktree::{
    create_dispatched_actions, create_duck, create_reducer, duck_tree, Action, Reducer, Store,
};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Default)]
struct TodoState {
    items: Vec<(String, bool)>,
}

#[derive(Clone, Debug)]
enum TodoPayload {
    Text(String),
    Index(usize),
    None,
}

struct TodoStore {
    reducer: Reducer<TodoState, TodoPayload>,
    state: Mutex<TodoState>,
}

impl Store<TodoPayload> for TodoStore {
    type Output = usize;
    type Error = std::convert::Infallible;

    /// Returns the number of todos after the action was applied.
    fn dispatch(&self, action: &Action<TodoPayload>) -> Result<Option<usize>, Self::Error> {
        let mut state = self.state.lock().unwrap();
        *state = self.reducer.reduce(state.clone(), action.clone());
        Ok(Some(state.items.len()))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Ducktree Todo Example ===\n");

    let tree = duck_tree! {
        todos: {
            add: create_duck("TODO_ADD", |mut s: TodoState, p: TodoPayload| {
                if let TodoPayload::Text(text) = p {
                    s.items.push((text, false));
                }
                s
            }),
            toggle: create_duck("TODO_TOGGLE", |mut s: TodoState, p: TodoPayload| {
                if let TodoPayload::Index(i) = p {
                    if let Some(item) = s.items.get_mut(i) {
                        item.1 = !item.1;
                    }
                }
                s
            }),
        },
        reset: create_duck("RESET", |_: TodoState, _: TodoPayload| TodoState::default()),
    }
    .expect("todo tree is well formed");

    let reducer = create_reducer(&tree, TodoState::default()).expect("todo ducks compose");
    println!(
        "Registered action types: {:?}\n",
        reducer.dispatch_table().action_types().collect::<Vec<_>>()
    );

    let store = Arc::new(TodoStore {
        reducer,
        state: Mutex::new(TodoState::default()),
    });
    let actions = create_dispatched_actions(&tree, Arc::clone(&store)).expect("todo ducks bind");
    let todos = actions.branch("todos").expect("todos group");

    for text in ["write docs", "review", "ship"] {
        let count = todos
            .action("add")
            .expect("add action")
            .call(TodoPayload::Text(text.to_string()))
            .expect("dispatch");
        println!("Added {text:?}, store returned {:?}", count.returned());
    }

    todos
        .action("toggle")
        .expect("toggle action")
        .call(TodoPayload::Index(1))
        .expect("dispatch");

    println!("\nState after toggling #1:");
    for (i, (text, done)) in store.state.lock().unwrap().items.iter().enumerate() {
        println!("  {i}. [{}] {text}", if *done { "x" } else { " " });
    }

    actions
        .action("reset")
        .expect("reset action")
        .call(TodoPayload::None)
        .expect("dispatch");
    println!(
        "\nAfter reset: {} todos",
        store.state.lock().unwrap().items.len()
    );
}
