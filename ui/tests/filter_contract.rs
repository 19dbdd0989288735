//! Page contract lint: the hosting markup keys every filter option off its
//! element id, so ids must be unique across all three groups and each
//! group's default must actually be one of its own options.

use std::collections::HashSet;

use ui::core::filters::{LastActiveWindow, NodeTypeFilter, TimeFrame};

#[test]
fn element_ids_are_unique_across_all_groups() {
    let mut seen = HashSet::new();
    let ids = TimeFrame::ALL
        .iter()
        .map(|tf| tf.element_id())
        .chain(LastActiveWindow::ALL.iter().map(|la| la.element_id()))
        .chain(NodeTypeFilter::ALL.iter().map(|nt| nt.element_id()));

    for id in ids {
        assert!(seen.insert(id), "duplicate element id: {id}");
    }
    assert_eq!(seen.len(), 9 + 9 + 4);
}

#[test]
fn group_defaults_are_members_of_their_groups() {
    assert!(TimeFrame::ALL.contains(&TimeFrame::default()));
    assert!(LastActiveWindow::ALL.contains(&LastActiveWindow::default()));
    assert!(NodeTypeFilter::ALL.contains(&NodeTypeFilter::default()));
}

#[test]
fn labels_are_nonempty_and_unique_within_each_group() {
    for group in [
        TimeFrame::ALL.iter().map(|tf| tf.label()).collect::<Vec<_>>(),
        LastActiveWindow::ALL
            .iter()
            .map(|la| la.label())
            .collect::<Vec<_>>(),
        NodeTypeFilter::ALL
            .iter()
            .map(|nt| nt.label())
            .collect::<Vec<_>>(),
    ] {
        let unique: HashSet<&str> = group.iter().copied().collect();
        assert_eq!(unique.len(), group.len());
        assert!(group.iter().all(|label| !label.is_empty()));
    }
}
