use store_framework::{
    FrameworkError, Phase, Reducer, RemoteEntity, RequestId, ResourceState, StoreActor,
};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Book {
    id: u32,
    title: String,
}

impl RemoteEntity for Book {
    type Id = u32;
    type Draft = String;

    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug)]
enum BookAction {
    FetchAll(RequestId, Phase<Vec<Book>>),
    Add(Phase<Book>),
    Remove(Phase<u32>),
}

#[derive(Debug)]
struct BookReducer;

impl Reducer for BookReducer {
    const NAME: &'static str = "books";
    type State = ResourceState<Book>;
    type Action = BookAction;

    fn reduce(mut state: Self::State, action: BookAction) -> Self::State {
        match action {
            BookAction::FetchAll(request, phase) => state.apply_refresh(request, phase),
            BookAction::Add(phase) => state.apply_create(phase),
            BookAction::Remove(phase) => state.apply_delete(phase),
        }
        state
    }
}

fn book(id: u32, title: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
    }
}

#[tokio::test]
async fn test_store_applies_actions_in_order() {
    let (actor, handle) = StoreActor::<BookReducer>::new(10);
    let task = tokio::spawn(actor.run());

    let request = handle.next_request();
    handle
        .dispatch(BookAction::FetchAll(request, Phase::Pending))
        .await
        .unwrap();
    handle
        .dispatch(BookAction::FetchAll(
            request,
            Phase::Fulfilled(vec![book(1, "Dune"), book(2, "Emma")]),
        ))
        .await
        .unwrap();
    handle.dispatch(BookAction::Add(Phase::Pending)).await.unwrap();
    handle
        .dispatch(BookAction::Add(Phase::Fulfilled(book(3, "Ulysses"))))
        .await
        .unwrap();
    handle.dispatch(BookAction::Remove(Phase::Pending)).await.unwrap();
    handle
        .dispatch(BookAction::Remove(Phase::Fulfilled(1)))
        .await
        .unwrap();

    let state = handle.snapshot().await.unwrap();
    assert_eq!(state.items, vec![book(2, "Emma"), book(3, "Ulysses")]);
    assert!(!state.loading);
    assert_eq!(state.error, None);

    drop(handle);
    task.await.unwrap();
}

#[tokio::test]
async fn test_subscribers_see_each_transition() {
    let (actor, handle) = StoreActor::<BookReducer>::new(10);
    tokio::spawn(actor.run());
    let mut watcher = handle.subscribe();

    handle.dispatch(BookAction::Add(Phase::Pending)).await.unwrap();
    watcher.changed().await.unwrap();
    assert!(watcher.borrow_and_update().loading);

    handle
        .dispatch(BookAction::Add(Phase::Rejected("Failed to add book".into())))
        .await
        .unwrap();
    watcher.changed().await.unwrap();
    let state = watcher.borrow_and_update().clone();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to add book"));
}

#[tokio::test]
async fn test_concurrent_refreshes_resolve_to_latest() {
    let (actor, handle) = StoreActor::<BookReducer>::new(10);
    tokio::spawn(actor.run());

    let older = handle.next_request();
    let newer = handle.next_request();
    handle
        .dispatch(BookAction::FetchAll(older, Phase::Pending))
        .await
        .unwrap();
    handle
        .dispatch(BookAction::FetchAll(newer, Phase::Pending))
        .await
        .unwrap();

    // The newer response arrives first, the older one last.
    handle
        .dispatch(BookAction::FetchAll(newer, Phase::Fulfilled(vec![book(2, "new")])))
        .await
        .unwrap();
    handle
        .dispatch(BookAction::FetchAll(older, Phase::Fulfilled(vec![book(1, "old")])))
        .await
        .unwrap();

    let state = handle.snapshot().await.unwrap();
    assert_eq!(state.items, vec![book(2, "new")]);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_closed_store_reports_error() {
    let (actor, handle) = StoreActor::<BookReducer>::new(1);
    drop(actor);

    let result = handle.dispatch(BookAction::Add(Phase::Pending)).await;
    assert_eq!(result, Err(FrameworkError::StoreClosed));
}

#[test]
fn test_replay_folds_actions() {
    let state = BookReducer::replay(vec![
        BookAction::Add(Phase::Pending),
        BookAction::Add(Phase::Fulfilled(book(1, "Dune"))),
    ]);
    assert_eq!(state.items, vec![book(1, "Dune")]);
}
