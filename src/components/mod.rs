pub mod back_to_top;
pub mod hero;
pub mod nav;
pub mod rating_input;
pub mod testimonial_form;
pub mod testimonials_list;
