use gloo_file::futures::read_as_data_url;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CarFormDialog;
use super::CarSubmission;
use crate::notify::notify_error;

pub fn update(component: &mut CarFormDialog, ctx: &Context<CarFormDialog>, msg: Msg) -> bool {
    match msg {
        Msg::SetCompany(value) => {
            component.draft.form.company = value;
            true
        }
        Msg::SetModel(value) => {
            component.draft.form.model = value;
            true
        }
        Msg::SetPrice(value) => {
            component.draft.form.price = value;
            true
        }
        Msg::SetDescription(value) => {
            component.draft.form.description = value;
            true
        }
        Msg::FileSelected(file) => {
            let (mime, size) = (file.type_(), file.size() as u64);
            let selection = match component.draft.pick_image(file.clone(), &mime, size) {
                Ok(selection) => selection,
                Err(rejection) => {
                    component.clear_file_input();
                    notify_error("Cannot use this file", rejection);
                    return false;
                }
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                match read_as_data_url(&gloo_file::File::from(file)).await {
                    Ok(data_url) => link.send_message(Msg::PreviewReady { selection, data_url }),
                    Err(err) => gloo_console::error!(format!("image preview failed: {}", err)),
                }
            });
            true
        }
        Msg::PreviewReady {
            selection,
            data_url,
        } => component.draft.preview_ready(selection, data_url),
        Msg::ClearImage => {
            component.forget_image();
            true
        }
        Msg::Submit => {
            if let Some((fields, image)) = component.draft.submit() {
                ctx.props().on_submit.emit(CarSubmission { fields, image });
            }
            true
        }
        Msg::Close => {
            ctx.props().on_close.emit(());
            false
        }
    }
}
