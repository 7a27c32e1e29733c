//! Restaurant-reservation toast: text lines, an app-logo image, a
//! selection input, and two foreground action buttons.
//!
//! Prints the serialized document on every platform; on Windows it also
//! shows the toast.

use crouton::{
    ActivationType, ImagePlacement, Text, Toast, ToastAction, ToastInput, ToastInputType, Visual,
    VisualImage,
};

fn main() {
    let mut visual = Visual::new();
    visual.add_text(Text::new("Spicy Heaven"));
    visual.add_text(Text::new("When do you plan to come in tomorrow?"));
    visual.add_image(
        VisualImage::new("ms-appx:///Assets/Deadpool.png")
            .with_placement(ImagePlacement::AppLogoOverride),
    );

    let mut input = ToastInput::new("time", ToastInputType::Selection).with_default_input("2");
    input.add_selection("1", "Breakfast");
    input.add_selection("2", "Lunch");
    input.add_selection("3", "Dinner");

    let mut toast = Toast::new();
    toast.set_visual(visual);
    toast.add_action_item(input);
    toast.add_action_item(
        ToastAction::new("Reserve", "reserve").with_activation_type(ActivationType::Foreground),
    );
    toast.add_action_item(
        ToastAction::new("Call Restaurant", "call").with_activation_type(ActivationType::Foreground),
    );

    println!("{}", toast.to_xml());

    #[cfg(windows)]
    if let Err(err) = crouton::platform::win32::show(&toast, "crouton.demo") {
        eprintln!("failed to show toast: {err}");
    }
}
