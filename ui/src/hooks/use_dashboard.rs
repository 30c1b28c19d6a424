use payloads::BookingId;
use yew::prelude::*;

use crate::actions;
use crate::get_api_client;
use crate::state::{
    ActiveTab, DashboardAction, DashboardState, FormEdit, NOTICE_DURATION_MS,
    RequestCounter,
};

/// Dashboard state plus the callbacks that change it.
pub struct DashboardHandle {
    pub state: UseReducerHandle<DashboardState>,
    pub refresh: Callback<()>,
    pub submit_block: Callback<()>,
    pub edit_form: Callback<FormEdit>,
    pub select_tab: Callback<ActiveTab>,
    /// Open the confirmation dialog for a record.
    pub request_delete: Callback<BookingId>,
    /// Delete the record awaiting confirmation.
    pub confirm_delete: Callback<()>,
    pub cancel_delete: Callback<()>,
}

/// Owns the dashboard's view state.
///
/// Loads the record list on mount, clears each notice after
/// `NOTICE_DURATION_MS`, and runs the network actions on the local
/// executor. Listing requests carry a generation so a slow response cannot
/// overwrite a newer one.
#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let state = use_reducer(DashboardState::default);
    let api = use_memo((), |_| get_api_client());
    let generations = use_memo((), |_| RequestCounter::default());

    let refresh = {
        let dispatcher = state.dispatcher();
        let api = api.clone();
        let generations = generations.clone();

        use_callback((), move |_: (), _| {
            let dispatcher = dispatcher.clone();
            let api = api.clone();
            let generations = generations.clone();

            yew::platform::spawn_local(async move {
                let dispatch =
                    |action: DashboardAction| dispatcher.dispatch(action);
                actions::load_bookings(&*api, &generations, &dispatch).await;
            });
        })
    };

    // Load on mount
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| refresh.emit(()));
    }

    // Auto-dismiss whichever notice is current
    {
        let dispatcher = state.dispatcher();
        let notice_id = state.notice.as_ref().map(|notice| notice.id);

        use_effect_with(notice_id, move |notice_id| {
            if let Some(id) = *notice_id {
                yew::platform::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(NOTICE_DURATION_MS)
                        .await;
                    dispatcher.dispatch(DashboardAction::DismissNotice(id));
                });
            }
        });
    }

    let submit_block = {
        let form = state.form.clone();
        let dispatcher = state.dispatcher();
        let api = api.clone();
        let generations = generations.clone();

        Callback::from(move |_| {
            let form = form.clone();
            let dispatcher = dispatcher.clone();
            let api = api.clone();
            let generations = generations.clone();

            yew::platform::spawn_local(async move {
                let dispatch =
                    |action: DashboardAction| dispatcher.dispatch(action);
                actions::submit_block(&*api, &generations, &form, &dispatch)
                    .await;
            });
        })
    };

    let confirm_delete = {
        let pending = state.pending_delete.clone();
        let dispatcher = state.dispatcher();
        let api = api.clone();
        let generations = generations.clone();

        Callback::from(move |_| {
            let Some(id) = pending.clone() else {
                return;
            };
            dispatcher.dispatch(DashboardAction::CloseDeleteDialog);

            let dispatcher = dispatcher.clone();
            let api = api.clone();
            let generations = generations.clone();

            yew::platform::spawn_local(async move {
                let dispatch =
                    |action: DashboardAction| dispatcher.dispatch(action);
                actions::delete_booking(&*api, &generations, &id, &dispatch)
                    .await;
            });
        })
    };

    let edit_form = {
        let dispatcher = state.dispatcher();
        Callback::from(move |edit| {
            dispatcher.dispatch(DashboardAction::EditForm(edit))
        })
    };

    let select_tab = {
        let dispatcher = state.dispatcher();
        Callback::from(move |tab| {
            dispatcher.dispatch(DashboardAction::SelectTab(tab))
        })
    };

    let request_delete = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id| {
            dispatcher.dispatch(DashboardAction::RequestDelete(id))
        })
    };

    let cancel_delete = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| {
            dispatcher.dispatch(DashboardAction::CloseDeleteDialog)
        })
    };

    DashboardHandle {
        state,
        refresh,
        submit_block,
        edit_form,
        select_tab,
        request_delete,
        confirm_delete,
        cancel_delete,
    }
}
