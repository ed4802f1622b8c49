use super::try_init;

#[test]
fn second_install_is_an_error() {
    let _ = try_init(0);

    assert!(try_init(1).is_err());
}
