use super::*;

#[test]
fn buttons_cover_every_destination_but_native() {
    let shown: Vec<Destination> = BUTTONS.iter().map(|b| b.destination).collect();
    let expected: Vec<Destination> = Destination::ALL
        .iter()
        .copied()
        .filter(|d| *d != Destination::Native)
        .collect();
    assert_eq!(shown.len(), expected.len());
    for destination in expected {
        assert!(shown.contains(&destination), "missing {destination}");
    }
}

#[test]
fn download_comes_first() {
    assert_eq!(BUTTONS[0].destination, Destination::Download);
    assert_eq!(BUTTONS[0].label, "Download");
}

#[test]
fn button_labels_are_unique() {
    for (i, a) in BUTTONS.iter().enumerate() {
        for (j, b) in BUTTONS.iter().enumerate() {
            if i != j {
                assert_ne!(a.label, b.label);
            }
        }
    }
}
