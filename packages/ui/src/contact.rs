use dioxus::prelude::*;

use crate::components::Button;
use crate::icons::{FaBuilding, FaEnvelope, FaPhone};
use crate::section::Section;
use crate::site::use_site;
use crate::Icon;

#[component]
pub fn Contact() -> Element {
    let site = use_site();
    let contact = &site.contact;

    rsx! {
        section {
            id: Section::Contact.anchor(),
            class: "contact",
            h2 { class: "section-title", "Get In Touch" }
            p { class: "section-text", "{contact.intro}" }
            div {
                class: "contact-lines",
                p {
                    Icon { icon: FaEnvelope, width: 16, height: 16 }
                    " Email: {contact.email}"
                }
                p {
                    Icon { icon: FaPhone, width: 16, height: 16 }
                    " Phone: {contact.phone}"
                }
                p {
                    Icon { icon: FaBuilding, width: 16, height: 16 }
                    " Address: {contact.address}"
                }
            }
            div {
                class: "contact-actions",
                Button { "Book a Demo" }
            }
        }
    }
}
