use quick_kv::triggers::{Trigger, TriggerQueue};

#[test]
fn take_drains_in_arrival_order() {
    let queue = TriggerQueue::new();
    let handler_side = queue.clone();
    handler_side.push(Trigger::Hotkey);
    handler_side.push(Trigger::TrayToggle);
    handler_side.push(Trigger::Quit);
    assert_eq!(queue.take(), vec![Trigger::Hotkey, Trigger::TrayToggle, Trigger::Quit]);
    assert!(queue.take().is_empty());
}
