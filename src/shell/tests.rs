// src/shell/tests.rs

use super::actions::ShellAction;
use super::mock::MockShell;
use super::shell_trait::Shell;
use anyhow::Result;

#[test]
fn it_should_report_the_address_of_the_mock_shell() -> Result<()> {
    let shell = MockShell::new("https://example.com/");
    assert_eq!(shell.current_href()?, "https://example.com/");
    Ok(())
}

#[test]
fn it_should_fail_when_the_address_is_unavailable() {
    let shell = MockShell::without_location();
    assert!(shell.current_href().is_err());
}

#[test]
fn it_should_record_prompts_and_return_the_scripted_answer() {
    let mut shell = MockShell::new("https://example.com/");
    assert!(shell.confirm("first?"));
    shell.answer_confirm(false);
    assert!(!shell.confirm("second?"));
    assert_eq!(shell.prompts(), ["first?".to_string(), "second?".to_string()]);
}

#[test]
fn it_should_record_actions_dispatched_to_the_mock_shell() -> Result<()> {
    let mut shell = MockShell::new("https://example.com/");
    shell.dispatch_actions(vec![
        ShellAction::CopyToClipboard("hello".to_string()),
        ShellAction::Notify("done".to_string()),
    ])?;

    let dispatched = shell.dispatched_actions();
    assert_eq!(dispatched.len(), 2);
    assert_eq!(dispatched[0], ShellAction::CopyToClipboard("hello".to_string()));

    assert_eq!(shell.take_actions().len(), 2);
    assert!(shell.dispatched_actions().is_empty());
    Ok(())
}

#[test]
fn it_should_update_the_address_on_replace_location() -> Result<()> {
    let mut shell = MockShell::new("https://example.com/");
    shell.dispatch_actions(vec![ShellAction::ReplaceLocation(
        "https://example.com/?a=b".to_string(),
    )])?;
    assert_eq!(shell.href(), Some("https://example.com/?a=b"));
    Ok(())
}
