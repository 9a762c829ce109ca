//! Menu input feeding the session, end to end without a terminal.

use tetris_stack::core::{ActionError, Session, SessionConfig};
use tetris_stack::input::{MenuCommand, OptionInput, OptionReader};

#[test]
fn scripted_menu_drives_session() {
    let script = "2\n2\n2\n2\n5\n3\n7\n0\n1\n";
    let mut reader = OptionReader::new(script.as_bytes());
    let mut session = Session::new(SessionConfig::default().with_seed(42));
    session.start();

    let mut results = Vec::new();
    let mut invalid = 0;
    while let Some(input) = reader.next_input().unwrap() {
        match input {
            OptionInput::Command(MenuCommand::Quit) => break,
            OptionInput::Command(MenuCommand::Action(action)) => {
                results.push(session.apply(action).err());
            }
            OptionInput::Invalid(_) => invalid += 1,
        }
    }

    // Three reserves fill the stack, the fourth is rejected.
    assert_eq!(
        results,
        vec![None, None, None, Some(ActionError::FullStack), None, None]
    );
    assert_eq!(invalid, 1);
    assert_eq!(session.stack().len(), 2);
    assert_eq!(session.queue().len(), 5);

    // Input after quit is left unread.
    assert!(reader.next_input().unwrap().is_some());
}
