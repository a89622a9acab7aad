/*
 * // Copyright (c) Radzivon Bartoshyk 6/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::FftError;
use std::sync::OnceLock;

/// Diagnostic hook invoked with `(message, file, line)` whenever the
/// engine constructs an error value, before that error is returned to
/// the caller. The hook must not panic.
pub type FaultHandler = fn(&str, &'static str, u32);

static FAULT_HANDLER: OnceLock<FaultHandler> = OnceLock::new();

/// Installs the process-wide fault handler.
///
/// The handler can be set once and is read-only afterwards, so installing
/// it before transforms run concurrently makes it safe to share without
/// locking. Returns `false` when a handler was already installed.
pub fn set_fault_handler(handler: FaultHandler) -> bool {
    FAULT_HANDLER.set(handler).is_ok()
}

/// Routes `error` through the fault handler, if any, and hands it back.
pub(crate) fn flag(error: FftError, file: &'static str, line: u32) -> FftError {
    if let Some(handler) = FAULT_HANDLER.get() {
        handler(&error.to_string(), file, line);
    }
    error
}

macro_rules! fault {
    ($err:expr) => {
        return Err(crate::handler::flag($err, file!(), line!()))
    };
}

pub(crate) use fault;
