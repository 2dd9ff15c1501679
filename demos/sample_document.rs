//! Builds a small sample page and prints it rendered for `name = Clio`.
//!
//! Run with `cargo run --example sample_document`.

use tagsmith::{Element, Namespace};

fn footer() -> Element {
    let mut footer = Element::root();
    footer
        .child("div")
        .with_class_and_id(Some("footer"), Some("foot1"))
        .child("h3")
        .child("p")
        .child("pre")
        .scope(|pre| {
            pre.attr("style", "some style");
            pre.append("This is the footer");
        });
    footer
}

pub fn sample_document() -> Element {
    let mut doc = Element::root();
    doc.append("<!DOCTYPE html>\n");

    doc.child("html").scope(|html| {
        html.child("head").attr("title", "Good morning ${name}!");

        html.child("body").scope(|body| {
            body.child("h3").class("main").append("Header 3");

            body.child("p").scope(|p| {
                p.attr("class", "some class");
                p.append("First paragraph");
            });

            // same as above, in one expression
            body.child("p").class("some class").append("Bullet points");

            body.child("ul").scope(|ul| {
                for i in 0..10 {
                    ul.child("li").append(i.to_string());
                }
            });

            body.child("p").scope(|p| {
                p.append("Inline html works fine");
                p.child("b").class("bold");
            });

            body.append(footer());
        });
    });

    doc
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let html = sample_document().render(&Namespace::new().with("name", "Clio"))?;
    println!("{html}");
    Ok(())
}
