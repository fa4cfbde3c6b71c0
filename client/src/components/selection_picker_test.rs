use super::*;
use crate::catalog::find_product;

fn pulse() -> &'static Product {
    find_product("1").expect("catalog has product 1")
}

#[test]
fn ready_needs_both_parts() {
    let product = pulse();
    let mut selection = ProductSelection::default();
    assert_eq!(selection.ready(product), None);
    selection.size = Some(product.sizes[0]);
    assert_eq!(selection.ready(product), None);
    selection.color = Some(product.colors[0]);
    assert_eq!(selection.ready(product), Some((product.sizes[0], product.colors[0])));
}

#[test]
fn ready_rejects_values_the_product_does_not_offer() {
    let product = pulse();
    let selection = ProductSelection { size: Some(ShoeSize::whole(30)), color: Some(product.colors[0]) };
    assert_eq!(selection.ready(product), None);
    let selection = ProductSelection { size: Some(product.sizes[0]), color: Some("#123456") };
    assert_eq!(selection.ready(product), None);
}

#[test]
fn prompt_tracks_missing_parts() {
    let mut selection = ProductSelection::default();
    assert_eq!(selection.prompt(), "Select Size & Color");
    selection.color = Some("#000000");
    assert_eq!(selection.prompt(), "Select a Size");
    selection.size = Some(ShoeSize::whole(9));
    assert_eq!(selection.prompt(), "Add to Cart");
}
