use crate::components::ToolButton;
use crate::tools::{Tool, ToolAction, ToolbarItem};
use crate::WhiteboardApp;

pub fn tools_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .exact_width(52.0)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                let active = app.interaction().tool();
                let mut clicked: Option<ToolbarItem> = None;

                for tool in Tool::ALL.into_iter().filter(|tool| *tool != Tool::Hand) {
                    if ToolButton::new(tool.icon(), tool.label(), tool == active)
                        .show(ui)
                        .clicked()
                    {
                        clicked = Some(tool.into());
                    }
                }

                ui.separator();

                for action in ToolAction::ALL {
                    let enabled = match action {
                        ToolAction::Undo => app.drawing().can_undo(),
                        ToolAction::Redo => app.drawing().can_redo(),
                        ToolAction::ZoomIn | ToolAction::ZoomOut => true,
                    };
                    if ToolButton::new(action.icon(), action.label(), false)
                        .enabled(enabled)
                        .show(ui)
                        .clicked()
                    {
                        clicked = Some(action.into());
                    }
                }
                if ToolButton::new(Tool::Hand.icon(), Tool::Hand.label(), active == Tool::Hand)
                    .show(ui)
                    .clicked()
                {
                    clicked = Some(Tool::Hand.into());
                }

                if let Some(item) = clicked {
                    log::info!("Toolbar: {:?}", item);
                    app.activate(item);
                }
            });
        });
}
